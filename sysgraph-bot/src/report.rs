//! Report text formatting and ordered delivery

use std::path::Path;
use sysgraph_common::{Result, TelegramClient};
use sysgraph_metrics::MetricAverages;
use tracing::{info, instrument};

/// Format the four-line report summary
///
/// The distribution label is used verbatim; averages are rounded to one
/// decimal place.
pub fn format_summary(distro: &str, averages: &MetricAverages) -> String {
    format!(
        "{}\nCPU: {:.1}%\nRAM: {:.1}%\nThermal: {:.1}°C",
        distro, averages.cpu, averages.ram, averages.temp
    )
}

/// Delivers a rendered figure and its text summary to one chat
///
/// Borrows the client for the delivery phase only; the two calls are strictly
/// ordered, photo first, and a photo failure suppresses the text send.
#[derive(Debug)]
pub struct Reporter<'a> {
    client: &'a TelegramClient,
    chat_id: &'a str,
}

impl<'a> Reporter<'a> {
    /// Create a reporter for the given client and destination chat
    pub fn new(client: &'a TelegramClient, chat_id: &'a str) -> Self {
        Self { client, chat_id }
    }

    /// Send the photo, then the text, propagating the first failure
    #[instrument(skip(self, text), fields(photo = %photo.as_ref().display()))]
    pub async fn deliver(&self, photo: impl AsRef<Path>, text: &str) -> Result<()> {
        self.client.send_photo(self.chat_id, photo.as_ref()).await?;
        self.client.send_message(self.chat_id, text).await?;
        info!("Report delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_template() {
        let averages = MetricAverages {
            ram: 51.234,
            cpu: 25.0,
            temp: 46.78,
        };
        let text = format_summary("Debian GNU/Linux 12", &averages);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Debian GNU/Linux 12");
        assert_eq!(lines[1], "CPU: 25.0%");
        assert_eq!(lines[2], "RAM: 51.2%");
        assert_eq!(lines[3], "Thermal: 46.8°C");
    }

    #[test]
    fn test_summary_rounds_to_one_decimal() {
        let averages = MetricAverages {
            ram: 99.99,
            cpu: 0.04,
            temp: 45.55,
        };
        let text = format_summary("Alpine", &averages);
        assert!(text.contains("RAM: 100.0%"));
        assert!(text.contains("CPU: 0.0%"));
    }

    #[test]
    fn test_spec_scenario_quarter_load() {
        // avg.cpu = 25.0 -> "CPU: 25.0%"
        let averages = MetricAverages {
            ram: 50.0,
            cpu: 25.0,
            temp: 45.0,
        };
        let text = format_summary("Debian", &averages);
        assert!(text.contains("CPU: 25.0%"));
        assert!(text.contains("RAM: 50.0%"));
    }
}
