#![allow(dead_code)]

pub mod config;
pub mod containers;
pub mod db;
