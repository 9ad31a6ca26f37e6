pub mod cors;
pub mod response_envelope;
