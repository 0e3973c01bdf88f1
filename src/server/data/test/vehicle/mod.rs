use crate::server::{
    data::vehicle::VehicleRepository, error::AppError, model::vehicle::CreateVehicleParam,
};
use test_utils::{builder::TestBuilder, factory};

mod add_pilot;
mod create;
mod delete;
