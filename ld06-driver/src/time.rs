pub(crate) fn sleep_ms(duration_ms: u64) {
    std::thread::sleep(std::time::Duration::from_millis(duration_ms));
}
