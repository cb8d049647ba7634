pub mod answer_pool;
