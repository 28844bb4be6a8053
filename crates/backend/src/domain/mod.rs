pub mod a001_locker_master;
