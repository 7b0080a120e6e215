pub mod rental_reader;

pub use rental_reader::RentalReader;
