pub mod events {
    pub mod event_record;
}
