pub mod form_success;
