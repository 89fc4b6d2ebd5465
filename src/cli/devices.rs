use tabled::Table;

use crate::{
    cli::fail, config::Config, spotify::SpotifyClient, types::DeviceTableRow, utils, warning,
};

pub async fn devices(config: &Config) {
    let client = SpotifyClient::new(config);

    let pb = utils::spinner("Fetching devices...");
    let result = client.get_devices().await;
    pb.finish_and_clear();

    match result {
        Ok(devices) if devices.is_empty() => warning!("No devices found."),
        Ok(devices) => {
            let table_rows: Vec<DeviceTableRow> = devices
                .into_iter()
                .map(|(name, id)| DeviceTableRow { name, id })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => fail("Listing devices", e),
    }
}
