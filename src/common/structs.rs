pub mod number_of_bytes;
