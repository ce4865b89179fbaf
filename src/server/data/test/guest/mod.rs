use crate::server::{
    data::guest::GuestRepository,
    model::guest::{CreateGuestParams, UpdateGuestParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod update_profile;
