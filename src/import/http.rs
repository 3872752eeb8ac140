/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use anyhow::{anyhow, bail};
use reqwest::Method;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

pub struct Client {
	client: reqwest::blocking::Client,
}

impl Client {
	pub fn new() -> Result<Self, anyhow::Error> {
		let user_agent = format!("kvota/{}", env!("CARGO_PKG_VERSION"));
		let client = reqwest::blocking::Client::builder()
			.user_agent(user_agent)
			.timeout(Duration::from_secs(30))
			.build()?;

		Ok(Client { client })
	}

	/// Sends a GET and decodes the JSON body. Errors on non-2xx response
	/// codes.
	pub fn get<R>(&self, url: &str) -> Result<R, anyhow::Error>
	where
		R: for<'de> Deserialize<'de>,
	{
		let request = self
			.client
			.request(Method::GET, url)
			.header("Accept", "application/json");

		info!(url, "sending GET");
		let response = request.send()?;

		// Handle non-2xx response codes
		if !response.status().is_success() {
			bail!("Request failed with status: {}", response.status());
		}

		let response_data: R = response
			.json()
			.map_err(|e| anyhow!("unexpected response from {}: {}", url, e))?;
		Ok(response_data)
	}
}
