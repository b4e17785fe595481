pub mod share_code;
