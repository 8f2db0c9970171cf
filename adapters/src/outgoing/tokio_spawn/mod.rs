pub mod image_pipeline_tokio;
