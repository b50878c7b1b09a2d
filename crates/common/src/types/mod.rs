use serde::Serialize;

pub mod model_state;
pub mod villa;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
