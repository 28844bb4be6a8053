pub mod assign_locker;
