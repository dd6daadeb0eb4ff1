pub mod dscpconfigurations;
