use candle_core::Device;
use tracing::info;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::warn;

/// Picks the first usable accelerator compiled in (Metal, then CUDA), else the CPU.
///
/// An accelerator that fails to initialize is logged and skipped; the CPU is always
/// available, so selection itself never fails.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                info!(device = "metal", "Embedding device selected");
                return device;
            }
            Err(e) => warn!(error = %e, "Metal requested but unavailable"),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!(device = "cuda", "Embedding device selected");
                return device;
            }
            Err(e) => warn!(error = %e, "CUDA requested but unavailable"),
        }
    }

    info!(device = "cpu", "Embedding device selected");
    Device::Cpu
}

/// Short label for logs and readiness output.
pub fn device_label(device: &Device) -> &'static str {
    match device {
        Device::Cpu => "cpu",
        Device::Cuda(_) => "cuda",
        Device::Metal(_) => "metal",
    }
}
