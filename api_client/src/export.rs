use crate::client::SupplyLineClient;
use crate::error::ApiError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportResource {
    Chemicals,
    Tools,
    Kits,
    Calibrations,
}

impl ExportResource {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExportResource::Chemicals => "chemicals",
            ExportResource::Tools => "tools",
            ExportResource::Kits => "kits",
            ExportResource::Calibrations => "calibrations",
        }
    }
}

impl Display for ExportResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportResource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "chemicals" => Ok(ExportResource::Chemicals),
            "tools" => Ok(ExportResource::Tools),
            "kits" => Ok(ExportResource::Kits),
            "calibrations" => Ok(ExportResource::Calibrations),
            other => Err(format!("unknown export resource {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!("unknown export format {other:?}, expected csv, xlsx or pdf")),
        }
    }
}

impl SupplyLineClient {
    /// Downloads a report as an opaque file body.
    pub async fn export(
        &self,
        resource: ExportResource,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ApiError> {
        let path = format!("api/{resource}/export");
        let bytes = self
            .get_bytes(&path, &[("format", format.as_str())])
            .await?;
        info!(%resource, %format, bytes = bytes.len(), "exported report");
        Ok(bytes)
    }
}
