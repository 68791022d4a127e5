pub mod hickory;
