//! Testes de controle estendido, KernelSetState, ControlService e misc

use super::mock::{Call, MockKernel, CURRENT_PID, USER_BASE};
use super::{extended, short, trap};
use crate::core::collab::{InteractiveSession, SessionMode};
use crate::core::host::{HostKernel, KernelVersion};
use crate::core::object::Handle;
use crate::core::process::{CustomFlags, KProcess};
use crate::syscall::error::ResultCode;
use crate::syscall::ext::control::{extended_control, ControlOp, KERNEL_STATE_SESSION_MODE};
use crate::syscall::ext::info::EXTENSION_VERSION;
use crate::syscall::ext::service::{control_service, ServiceOp};
use crate::syscall::numbers::*;

#[test]
fn test_extended_control_opcodes() {
    let kernel = MockKernel::with_version(KernelVersion::new(2, 0x38, 0));
    kernel.current().custom_flags().insert(CustomFlags::FORCE_RWX_PAGES);
    kernel.session().set_mode(SessionMode::MENU_OPEN, true);

    assert_eq!(
        extended_control(&kernel, ControlOp::GetExtensionVersion as u32, 0),
        Ok(EXTENSION_VERSION)
    );
    assert_eq!(
        extended_control(&kernel, ControlOp::GetKernelVersion as u32, 0),
        Ok(0x0238_0000)
    );
    assert_eq!(
        extended_control(&kernel, ControlOp::GetProcessCustomFlags as u32, 0xFFFF_8001),
        Ok(CustomFlags::FORCE_RWX_PAGES.bits())
    );
    assert_eq!(
        extended_control(&kernel, ControlOp::GetSessionMode as u32, 0),
        Ok(SessionMode::MENU_OPEN.bits())
    );
    assert_eq!(
        extended_control(&kernel, 0x99, 0),
        Err(ResultCode::INVALID_ENUM_VALUE)
    );
    assert_eq!(kernel.current().refs(), 1);
}

#[test]
fn test_flush_all_caches() {
    let kernel = MockKernel::new();
    assert_eq!(extended_control(&kernel, ControlOp::FlushAllCaches as u32, 0), Ok(0));
    assert_eq!(
        kernel.calls(),
        vec![Call::FlushEntireDCache, Call::InvalidateEntireICache]
    );
}

#[test]
fn test_custom_flags_of_invalid_handle() {
    let kernel = MockKernel::new();
    assert_eq!(
        extended_control(&kernel, ControlOp::GetProcessCustomFlags as u32, 0x55),
        Err(ResultCode::INVALID_HANDLE)
    );
}

#[test]
fn integration_kernel_set_state_session_mode() {
    let kernel = MockKernel::new();

    let frame = trap(
        &kernel,
        short(0x7C, &[KERNEL_STATE_SESSION_MODE, SessionMode::PLUGIN_SWAP.bits(), 1]),
    );
    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!(kernel.session().mode(), SessionMode::PLUGIN_SWAP);

    let frame = trap(
        &kernel,
        short(0x7C, &[KERNEL_STATE_SESSION_MODE, SessionMode::PLUGIN_SWAP.bits(), 0]),
    );
    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert!(kernel.session().mode().is_empty());
}

#[test]
fn integration_kernel_set_state_rejects_unknown() {
    let kernel = MockKernel::new();

    let frame = trap(&kernel, short(0x7C, &[KERNEL_STATE_SESSION_MODE, 0x80, 1]));
    assert_eq!(frame.result(), ResultCode::INVALID_ENUM_VALUE);

    let frame = trap(&kernel, short(0x7C, &[0x10005, 0, 0]));
    assert_eq!(frame.result(), ResultCode::INVALID_ENUM_VALUE);
}

#[test]
fn integration_kernel_set_state_official_types() {
    let kernel = MockKernel::new();
    trap(&kernel, short(0x7C, &[0x03, 0, 0]));
    assert_eq!(
        kernel.calls(),
        vec![Call::Official(SVC_KERNEL_SET_STATE), Call::OfficialPostprocess]
    );
}

#[test]
fn test_steal_client_session() {
    let mut kernel = MockKernel::new();
    let port = kernel.add_object("KClientSession", 0xFFFA_0000, Some(b"fs:USER\0"));
    kernel.write_user(USER_BASE, b"fs:USER\0");

    let raw = control_service(&kernel, ServiceOp::StealClientSession as u32, USER_BASE, 0).unwrap();

    assert!(core::ptr::eq(kernel.object_at(CURRENT_PID, Handle::from_raw(raw)).unwrap(), port));
    // Referência base + a do handle novo.
    assert_eq!(port.refs(), 2);
}

#[test]
fn test_steal_unknown_service() {
    let kernel = MockKernel::new();
    kernel.write_user(USER_BASE, b"nope\0\0\0\0");

    assert_eq!(
        control_service(&kernel, ServiceOp::StealClientSession as u32, USER_BASE, 0),
        Err(ResultCode::NOT_FOUND)
    );
    assert_eq!(
        control_service(&kernel, ServiceOp::StealClientSession as u32, 0x10, 0),
        Err(ResultCode::INVALID_POINTER)
    );
}

#[test]
fn test_get_service_name() {
    let mut kernel = MockKernel::new();
    let session = kernel.add_object("KClientSession", 0xFFFA_0000, Some(b"srv:\0\0\0\0"));
    let handle = kernel.open_object_handle(CURRENT_PID, session);

    assert_eq!(
        control_service(&kernel, ServiceOp::GetServiceName as u32, USER_BASE + 0x10, handle.raw()),
        Ok(0)
    );
    assert_eq!(kernel.read_user(USER_BASE + 0x10, 8), b"srv:\0\0\0\0".to_vec());
    assert_eq!(session.refs(), 1);

    assert_eq!(
        control_service(&kernel, 7, 0, 0),
        Err(ResultCode::INVALID_ENUM_VALUE)
    );
}

#[test]
fn integration_break_without_debugger() {
    let kernel = MockKernel::new();
    let frame = trap(&kernel, short(0x3C, &[2]));

    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!(kernel.calls(), vec![Call::Break(2), Call::OfficialPostprocess]);
}

#[test]
fn integration_break_with_debugger_is_official() {
    let mut kernel = MockKernel::new();
    kernel.attach_debugger(&[]);

    trap(&kernel, short(0x3C, &[2]));
    assert_eq!(
        kernel.calls(),
        vec![Call::Official(SVC_BREAK), Call::OfficialPostprocess]
    );
}

#[test]
fn integration_hardware_toggles() {
    let kernel = MockKernel::new();

    trap(&kernel, short(0x59, &[1]));
    trap(&kernel, short(0x5A, &[0]));

    assert_eq!(kernel.count(Call::GpuProtection(true)), 1);
    assert_eq!(kernel.count(Call::Wifi(false)), 1);
}

#[test]
fn integration_backdoor_returns_raw_value() {
    let kernel = MockKernel::new();

    let frame = trap(&kernel, short(0x7B, &[0xFFF0_1000, 0x1234]));
    assert_eq!(frame.r0, 0xFFF0_1000 ^ 0x1234);
    assert_eq!(kernel.count(Call::KernelCallback(0xFFF0_1000, 0x1234)), 1);

    let frame = trap(&kernel, short(0x7B, &[0, 0]));
    assert_eq!(frame.result(), ResultCode::INVALID_POINTER);
}

#[test]
fn integration_extended_control_through_trap() {
    let kernel = MockKernel::new();

    let frame = trap(&kernel, extended(SVC_EXTENDED_CONTROL, &[ControlOp::GetExtensionVersion as u32]));
    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!(frame.r1, EXTENSION_VERSION);

    let frame = trap(&kernel, extended(SVC_EXTENDED_CONTROL, &[0x77]));
    assert_eq!(frame.result(), ResultCode::INVALID_ENUM_VALUE);
}
