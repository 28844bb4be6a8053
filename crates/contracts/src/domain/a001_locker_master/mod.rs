pub mod aggregate;
pub mod dto;
pub mod index;

pub use aggregate::{
    Cabinet, CabinetIndex, CabinetNumber, Locker, LockerMaster, ReservedLocker, Room, SizeGroup,
};
pub use dto::{
    LockerDetailsResponse, LockerDto, LockerMasterEntryDto, LockerMasterResponse, MappedLockerDto,
};
pub use index::{LockerLocation, LockerMasterIndex, LockerSourcing};
