pub mod locker_status;

pub use locker_status::LockerStatus;
