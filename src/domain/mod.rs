pub mod catalog;
pub mod estimator;
pub mod home;
pub mod normalize;
pub mod rating;
pub mod reconcile;
pub mod tabular;
