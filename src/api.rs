pub mod elexon;
