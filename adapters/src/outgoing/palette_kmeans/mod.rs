pub mod kmeans_extractor;
