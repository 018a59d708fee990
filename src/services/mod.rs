pub mod detail;
pub mod enrichment;
pub mod jobs;
pub mod listing;
pub mod region;
pub mod region_cache;
pub mod source;
pub mod work24;
pub mod xml;
