pub mod pe1;
