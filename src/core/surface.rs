/// What the frame loop does after `get_current_texture` fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRecovery {
    /// Configure the surface again with the current size and draw next frame.
    Reconfigure,
    /// Drop this frame only.
    Skip,
    /// Stop rendering; the device cannot continue.
    Stop,
}

pub fn recovery_for(err: &wgpu::SurfaceError) -> SurfaceRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => SurfaceRecovery::Stop,
        _ => SurfaceRecovery::Skip,
    }
}
