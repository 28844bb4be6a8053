mod view;

pub use view::RentDetailsPage;
