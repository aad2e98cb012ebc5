pub mod gliders;
