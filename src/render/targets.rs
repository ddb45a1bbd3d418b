use super::helpers;
use crate::constants::{DEPTH_FORMAT, MSAA_SAMPLES};

/// Multisampled color and depth attachments sized to the surface.
///
/// The swapchain texture is the resolve target, so only these two need to
/// follow canvas resizes.
pub(crate) struct RenderTargets {
    pub(crate) color_format: wgpu::TextureFormat,
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = Self::create_msaa(device, color_format, width, height);
        let (depth_tex, depth_view) = Self::create_depth(device, width, height);
        Self {
            color_format,
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.msaa_tex, self.msaa_view) =
            Self::create_msaa(device, self.color_format, width, height);
        (self.depth_tex, self.depth_view) = Self::create_depth(device, width, height);
    }

    fn create_msaa(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_attachment_texture(
            device,
            "msaa_color",
            width,
            height,
            format,
            MSAA_SAMPLES,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }

    fn create_depth(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_attachment_texture(
            device,
            "depth",
            width,
            height,
            DEPTH_FORMAT,
            MSAA_SAMPLES,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }
}
