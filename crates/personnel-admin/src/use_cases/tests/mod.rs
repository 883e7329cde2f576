mod common;
mod passport;
mod visa;
