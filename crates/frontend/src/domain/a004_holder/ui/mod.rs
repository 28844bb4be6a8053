pub mod rent_details;
