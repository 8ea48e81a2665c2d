mod chart;
mod entrance_timer;
mod frame_builder;
mod json_contract;
mod measurement;
mod snapshot;

pub use chart::{BarChart, LayoutPass};
pub use entrance_timer::{EntranceTimer, TimerState};
pub use frame_builder::build_render_frame;
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1, parse_data_points_json,
};
pub use measurement::{ExtentCache, ExtentChannel, MeasurementOutcome, MeasurementReport};
pub use snapshot::ChartSnapshot;
