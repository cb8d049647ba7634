pub mod gallows;
