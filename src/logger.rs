const LOG_CONFIGURATION_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(LOG_CONFIGURATION_FILE, Default::default()) {
        eprintln!(
            "Logging disabled, unable to load '{}': {}",
            LOG_CONFIGURATION_FILE, e
        );
    }
}

pub fn log_row(row_index: u32, values: &[i32]) {
    fn get_dot_array(values: &[i32]) -> Vec<String> {
        values
            .chunks(crate::image::CHANNELS)
            .map(|dot| {
                dot.iter()
                    .map(|value| format!("{:02X}", value))
                    .collect::<String>()
            })
            .collect()
    }
    log::trace!("row {}\n{:?}", row_index, get_dot_array(values));
}
