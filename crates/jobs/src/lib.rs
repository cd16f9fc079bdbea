pub mod stats_export;

pub use stats_export::StatsExportJob;
