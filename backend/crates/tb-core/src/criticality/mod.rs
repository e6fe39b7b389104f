pub mod criticality_input;
pub mod ranked;
pub mod scorer;
