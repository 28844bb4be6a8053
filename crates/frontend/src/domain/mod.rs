pub mod a001_locker_master;
pub mod a003_locker_selection;
pub mod a004_holder;
