use anyhow::{anyhow, Result};
use log::debug;
use wgpu::{BindGroup, BindGroupLayout, Device, Queue, RenderPipeline, Sampler, Texture};

const FRAME_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Color attachment over `view`, either cleared to black or loaded
pub(super) fn attachment(
    view: &wgpu::TextureView,
    clear: bool,
) -> Option<wgpu::RenderPassColorAttachment<'_>> {
    let load = if clear {
        wgpu::LoadOp::Clear(wgpu::Color::BLACK)
    } else {
        wgpu::LoadOp::Load
    };
    Some(wgpu::RenderPassColorAttachment {
        view,
        resolve_target: None,
        ops: wgpu::Operations {
            load,
            store: wgpu::StoreOp::Store,
        },
        depth_slice: None,
    })
}

/// Stretches the latest CPU-rendered scene frame over the whole target
pub(super) struct ScenePass {
    pipeline: RenderPipeline,
    layout: BindGroupLayout,
    sampler: Sampler,
    frame: Texture,
    bindings: BindGroup,
    frame_size: (u32, u32),
}

impl ScenePass {
    pub fn new(device: &Device, target_format: wgpu::TextureFormat) -> Self {
        let layout = frame_layout(device);
        let pipeline = stretch_pipeline(device, &layout, target_format);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("scene frame sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let frame = frame_texture(device, 1, 1);
        let bindings = frame_bindings(device, &layout, &frame, &sampler);

        Self {
            pipeline,
            layout,
            sampler,
            frame,
            bindings,
            frame_size: (1, 1),
        }
    }

    /// Copy an RGBA8 frame in; the texture is rebuilt whenever the size changes
    pub fn upload(&mut self, device: &Device, queue: &Queue, pixels: &[u8], width: u32, height: u32) -> Result<()> {
        let expected = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(anyhow!(
                "scene frame {}x{} carries {} bytes, expected {}",
                width,
                height,
                pixels.len(),
                expected
            ));
        }

        if self.frame_size != (width, height) {
            debug!("scene frame texture resized to {}x{}", width, height);
            self.frame = frame_texture(device, width, height);
            self.bindings = frame_bindings(device, &self.layout, &self.frame, &self.sampler);
            self.frame_size = (width, height);
        }

        queue.write_texture(
            self.frame.as_image_copy(),
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            self.frame.size(),
        );
        Ok(())
    }

    /// Clear `target` and draw the frame as one fullscreen triangle
    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene frame"),
            color_attachments: &[attachment(target, true)],
            ..Default::default()
        });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bindings, &[]);
        pass.draw(0..3, 0..1);
    }
}

fn frame_texture(device: &Device, width: u32, height: u32) -> Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("scene frame"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FRAME_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    })
}

fn frame_layout(device: &Device) -> BindGroupLayout {
    let fragment = wgpu::ShaderStages::FRAGMENT;
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene frame bindings"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: fragment,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: fragment,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

fn frame_bindings(device: &Device, layout: &BindGroupLayout, frame: &Texture, sampler: &Sampler) -> BindGroup {
    let view = frame.create_view(&Default::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene frame bindings"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn stretch_pipeline(
    device: &Device,
    layout: &BindGroupLayout,
    target_format: wgpu::TextureFormat,
) -> RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene stretch"),
        source: wgpu::ShaderSource::Wgsl(include_str!("display.wgsl").into()),
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene stretch"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene stretch"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: Default::default(),
        depth_stencil: None,
        multisample: Default::default(),
        multiview: None,
        cache: None,
    })
}
