pub mod csv_json_pipeline;
