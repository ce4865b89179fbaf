mod booking;
mod cabin;
mod guest;
