use std::{
    any::Any,
    ffi::CString,
    panic::{self, AssertUnwindSafe},
};

use log::{debug, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
};

use crate::{
    error::{Error, Result},
    vulkan::utils::cstringstuff::raw_to_cstring,
};

/// One window plus the event loop that owns the platform connection. winit
/// never creates a client-API context, so no "no API" hint is needed.
pub struct WindowHost {
    // Fields drop in order: the window goes before its event loop.
    window: Window,
    event_loop: EventLoop<()>,
    close_requested: bool,
}

fn check_window_params(width: u32, height: u32, title: &str) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::PlatformInit(format!(
            "invalid window size {}x{}",
            width, height
        )));
    }
    if title.is_empty() {
        return Err(Error::PlatformInit("window title is empty".to_string()));
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown error"
    }
}

// winit 0.26 panics instead of returning an error when no backend connects.
fn create_event_loop() -> Result<EventLoop<()>> {
    panic::catch_unwind(AssertUnwindSafe(EventLoop::new)).map_err(|payload| {
        Error::PlatformInit(format!(
            "no windowing backend available: {}",
            panic_message(payload.as_ref())
        ))
    })
}

impl WindowHost {
    pub fn open(width: u32, height: u32, title: &str) -> Result<Self> {
        check_window_params(width, height, title)?;

        let event_loop = create_event_loop()?;
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .build(&event_loop)
            .map_err(|err| Error::PlatformInit(err.to_string()))?;
        info!("window {:?} opened: {}x{} {:?}", window.id(), width, height, title);

        Ok(WindowHost {
            window,
            event_loop,
            close_requested: false,
        })
    }

    pub fn required_extensions(&self) -> Result<Vec<CString>> {
        let raw = ash_window::enumerate_required_extensions(&self.window).map_err(|result| {
            Error::PlatformInit(format!(
                "no Vulkan presentation support for this window: {:?}",
                result
            ))
        })?;
        Ok(unsafe { raw_to_cstring(raw) })
    }

    pub fn poll_events(&mut self) {
        let window_id = self.window.id();
        let close_requested = &mut self.close_requested;

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    window_id: id,
                } if id == window_id => *close_requested = true,
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => (),
            }
        });
    }

    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn run_until_closed(&mut self) {
        while !self.should_close() {
            self.poll_events();
        }
        debug!("close requested");
    }

    pub fn close(self) {
        drop(self);
    }
}

impl Drop for WindowHost {
    fn drop(&mut self) {
        debug!("closing window {:?}", self.window.id());
    }
}
