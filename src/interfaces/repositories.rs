pub mod enrichment;
pub mod kv_repo;
pub mod storage;
