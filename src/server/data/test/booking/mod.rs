use crate::server::{
    data::booking::BookingRepository,
    model::booking::{CreateBookingParams, UpdateBookingParams},
};
use chrono::NaiveDate;
use entity::booking::BookingStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_guest;
mod update;
