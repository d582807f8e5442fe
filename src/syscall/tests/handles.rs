//! Testes de CopyHandle, TranslateHandle e das SVCs de info

use super::mock::{Call, MockKernel, CURRENT_PID, CURRENT_TID, USER_BASE, USER_SIZE};
use super::{extended, short, trap};
use crate::core::host::KernelVersion;
use crate::core::object::{Handle, KAutoObject};
use crate::core::process::{CustomFlags, KProcess};
use crate::syscall::error::ResultCode;
use crate::syscall::ext::{handle, info};
use crate::syscall::numbers::*;

#[test]
fn test_copy_handle_between_processes() {
    let mut kernel = MockKernel::new();
    let src = kernel.spawn_process(0x20, b"src\0\0\0\0\0");
    let dst = kernel.spawn_process(0x30, b"dst\0\0\0\0\0");
    let event = kernel.add_object("KEvent", 0xFFF9_0000, None);

    let src_handle = kernel.open_process_handle(CURRENT_PID, src);
    let dst_handle = kernel.open_process_handle(CURRENT_PID, dst);
    let in_handle = kernel.open_object_handle(0x20, event);

    let copied = handle::copy_handle(&kernel, dst_handle, in_handle, src_handle).unwrap();

    assert!(core::ptr::eq(kernel.object_at(0x30, copied).unwrap(), event));
    // Uma referência nova: a do handle inserido.
    assert_eq!(event.refs(), 2);
    assert_eq!(src.refs(), 1);
    assert_eq!(dst.refs(), 1);
}

#[test]
fn test_copy_handle_invalid_source_handle() {
    let mut kernel = MockKernel::new();
    let src = kernel.spawn_process(0x20, b"src\0\0\0\0\0");
    let src_handle = kernel.open_process_handle(CURRENT_PID, src);

    let result = handle::copy_handle(&kernel, Handle::CURRENT_PROCESS, Handle::from_raw(0x9999), src_handle);

    assert_eq!(result, Err(ResultCode::INVALID_HANDLE));
    assert_eq!(src.refs(), 1);
    assert_eq!(kernel.current().refs(), 1);
}

#[test]
fn test_copy_handle_invalid_destination() {
    let mut kernel = MockKernel::new();
    let event = kernel.add_object("KEvent", 0xFFF9_0000, None);
    let in_handle = kernel.open_object_handle(CURRENT_PID, event);

    let result = handle::copy_handle(&kernel, Handle::from_raw(0x4321), in_handle, Handle::CURRENT_PROCESS);

    assert_eq!(result, Err(ResultCode::INVALID_HANDLE));
    assert_eq!(event.refs(), 1);
}

#[test]
fn test_translate_handle_with_class_name() {
    let mut kernel = MockKernel::new();
    let port = kernel.add_object("KClientPort", 0xFFF9_1000, None);
    let handle = kernel.open_object_handle(CURRENT_PID, port);

    let kaddr = handle::translate_handle(&kernel, handle, USER_BASE).unwrap();

    assert_eq!(kaddr, 0xFFF9_1000);
    assert_eq!(kernel.read_user(USER_BASE, 12), b"KClientPort\0".to_vec());
    assert_eq!(port.refs(), 1);
}

#[test]
fn test_translate_handle_bad_pointer() {
    let mut kernel = MockKernel::new();
    let port = kernel.add_object("KClientPort", 0xFFF9_1000, None);
    let handle = kernel.open_object_handle(CURRENT_PID, port);

    assert_eq!(
        handle::translate_handle(&kernel, handle, 0x10),
        Err(ResultCode::INVALID_POINTER)
    );
    assert_eq!(port.refs(), 1);
}

#[test]
fn test_translate_handle_name_fits_but_terminator_does_not() {
    let mut kernel = MockKernel::new();
    let port = kernel.add_object("KClientPort", 0xFFF9_1000, None);
    let handle = kernel.open_object_handle(CURRENT_PID, port);
    // Nome cabe exatamente no fim da janela; o NUL cairia fora.
    let out = USER_BASE + (USER_SIZE - "KClientPort".len()) as u32;

    assert_eq!(
        handle::translate_handle(&kernel, handle, out),
        Err(ResultCode::INVALID_POINTER)
    );
    assert_eq!(kernel.read_user(out, 11), vec![0; 11]);
    assert_eq!(port.refs(), 1);
}

#[test]
fn test_translate_handle_current_process() {
    let kernel = MockKernel::new();

    let kaddr = handle::translate_handle(&kernel, Handle::CURRENT_PROCESS, USER_BASE).unwrap();

    assert_eq!(kaddr, kernel.current().kernel_address());
    assert_eq!(kernel.read_user(USER_BASE, 9), b"KProcess\0".to_vec());
    assert_eq!(kernel.current().refs(), 1);
}

#[test]
fn test_translate_handle_current_thread() {
    let kernel = MockKernel::new();

    let kaddr = handle::translate_handle(&kernel, Handle::CURRENT_THREAD, 0).unwrap();

    assert_eq!(kaddr, 0xFFF8_0000 + CURRENT_TID * 0x10);
    assert_eq!(kernel.current_thread_obj().refs(), 1);
}

#[test]
fn test_handle_info_current_process() {
    let kernel = MockKernel::new();

    assert_eq!(
        info::handle_info(&kernel, Handle::CURRENT_PROCESS, info::HANDLE_INFO_KERNEL_ADDRESS),
        Ok(kernel.current().kernel_address() as u64)
    );
    assert_eq!(
        info::handle_info(&kernel, Handle::CURRENT_PROCESS, info::HANDLE_INFO_CLASS_NAME_LEN),
        Ok("KProcess".len() as u64)
    );
    assert_eq!(kernel.current().refs(), 1);
}

#[test]
fn test_copy_handle_of_current_process() {
    let mut kernel = MockKernel::new();
    let dst = kernel.spawn_process(0x30, b"dst\0\0\0\0\0");
    let dst_handle = kernel.open_process_handle(CURRENT_PID, dst);

    let copied = handle::copy_handle(&kernel, dst_handle, Handle::CURRENT_PROCESS, Handle::CURRENT_PROCESS).unwrap();

    assert!(core::ptr::eq(kernel.object_at(0x30, copied).unwrap(), kernel.current().as_object()));
    // Só a referência do handle novo sobra.
    assert_eq!(kernel.current().refs(), 2);
    assert_eq!(dst.refs(), 1);
}

#[test]
fn test_copy_handle_pseudo_process_is_relative_to_source() {
    let mut kernel = MockKernel::new();
    let src = kernel.spawn_process(0x20, b"src\0\0\0\0\0");
    let src_handle = kernel.open_process_handle(CURRENT_PID, src);

    let copied = handle::copy_handle(&kernel, Handle::CURRENT_PROCESS, Handle::CURRENT_PROCESS, src_handle).unwrap();

    assert!(core::ptr::eq(kernel.object_at(CURRENT_PID, copied).unwrap(), src.as_object()));
    assert_eq!(src.refs(), 2);
    assert_eq!(kernel.current().refs(), 1);
}

#[test]
fn integration_translate_current_thread_via_trap() {
    let kernel = MockKernel::new();

    let frame = trap(&kernel, extended(SVC_TRANSLATE_HANDLE, &[Handle::CURRENT_THREAD.raw(), 0]));

    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!(frame.r1, kernel.current_thread_obj().kernel_address());
    assert_eq!(kernel.current_thread_obj().refs(), 1);
}

#[test]
fn test_process_info_extensions() {
    let kernel = MockKernel::new();
    kernel.current().custom_flags().insert(CustomFlags::SIGNAL_ON_EXIT);

    assert_eq!(
        info::process_info(&kernel, Handle::CURRENT_PROCESS, info::PROCESS_INFO_NAME),
        Ok(u64::from_le_bytes(*b"app\0\0\0\0\0"))
    );
    assert_eq!(
        info::process_info(&kernel, Handle::CURRENT_PROCESS, info::PROCESS_INFO_TITLE_ID),
        Ok(0x0004_0000_0000_0010)
    );
    assert_eq!(
        info::process_info(&kernel, Handle::CURRENT_PROCESS, info::PROCESS_INFO_CUSTOM_FLAGS),
        Ok(CustomFlags::SIGNAL_ON_EXIT.bits() as u64)
    );
    assert_eq!(
        info::process_info(&kernel, Handle::CURRENT_PROCESS, 0x10003),
        Err(ResultCode::INVALID_ENUM_VALUE)
    );
    assert_eq!(kernel.current().refs(), 1);
}

#[test]
fn test_thread_info_tls() {
    let mut kernel = MockKernel::new();
    let thread = kernel.spawn_thread(0x200, CURRENT_PID, 0);
    let handle = kernel.open_thread_handle(CURRENT_PID, thread);

    assert_eq!(
        info::thread_info(&kernel, handle, info::THREAD_INFO_TLS_ADDRESS),
        Ok(0x1FF8_2000 + 0x200 * 0x200)
    );
    assert_eq!(
        info::thread_info(&kernel, Handle::CURRENT_THREAD, info::THREAD_INFO_TLS_ADDRESS),
        Ok(0x1FF8_2000 + CURRENT_TID as u64 * 0x200)
    );
    assert_eq!(thread.refs(), 1);
    assert_eq!(kernel.current_thread_obj().refs(), 1);
}

#[test]
fn test_system_info_extension() {
    let kernel = MockKernel::with_version(KernelVersion::new(2, 0x39, 0));

    assert_eq!(
        info::system_info(&kernel, info::SYSTEM_INFO_EXTENSION, info::SYSTEM_PARAM_VERSION),
        Ok(info::EXTENSION_VERSION as u64)
    );
    assert_eq!(
        info::system_info(&kernel, info::SYSTEM_INFO_EXTENSION, info::SYSTEM_PARAM_KERNEL_VERSION),
        Ok(0x0239_0000)
    );
    assert_eq!(
        info::system_info(&kernel, info::SYSTEM_INFO_EXTENSION, 7),
        Err(ResultCode::INVALID_ENUM_VALUE)
    );
    assert_eq!(
        info::system_info(&kernel, 0x10001, 0),
        Err(ResultCode::INVALID_ENUM_VALUE)
    );
}

#[test]
fn integration_official_info_types_are_delegated() {
    let kernel = MockKernel::new();

    let frame = trap(&kernel, short(0x2B, &[0xFFFF_8001, 0x14]));

    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!(
        kernel.calls(),
        vec![Call::Official(SVC_GET_PROCESS_INFO), Call::OfficialPostprocess]
    );
}

#[test]
fn integration_handle_info_outputs() {
    let mut kernel = MockKernel::new();
    let port = kernel.add_object("KPort", 0xFFF9_2000, None);
    let handle = kernel.open_object_handle(CURRENT_PID, port);

    let frame = trap(
        &kernel,
        short(0x29, &[handle.raw(), info::HANDLE_INFO_KERNEL_ADDRESS]),
    );
    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!((frame.r1, frame.r2), (0xFFF9_2000, 0));

    let frame = trap(
        &kernel,
        short(0x29, &[handle.raw(), info::HANDLE_INFO_CLASS_NAME_LEN]),
    );
    assert_eq!(frame.r1, 5);
    assert_eq!(port.refs(), 1);
}

#[test]
fn integration_process_name_split_in_two_words() {
    let kernel = MockKernel::new();

    let frame = trap(
        &kernel,
        short(0x2B, &[0xFFFF_8001, info::PROCESS_INFO_NAME]),
    );

    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!(frame.r1, u32::from_le_bytes(*b"app\0"));
    assert_eq!(frame.r2, 0);
}

#[test]
fn integration_cfw_info() {
    let kernel = MockKernel::new();
    let frame = trap(&kernel, short(0x2E, &[]));

    assert_eq!(frame.result(), ResultCode::SUCCESS);
    assert_eq!(frame.r1, info::EXTENSION_VERSION);
    assert_eq!(frame.r2, info::COMMIT_HASH);
}

#[test]
fn integration_copy_handle_output() {
    let mut kernel = MockKernel::new();
    let event = kernel.add_object("KEvent", 0xFFF9_0000, None);
    let in_handle = kernel.open_object_handle(CURRENT_PID, event);

    let frame = trap(
        &kernel,
        extended(SVC_COPY_HANDLE, &[0xFFFF_8001, in_handle.raw(), 0xFFFF_8001]),
    );

    assert_eq!(frame.result(), ResultCode::SUCCESS);
    let copied = Handle::from_raw(frame.r1);
    assert_ne!(copied, in_handle);
    assert!(core::ptr::eq(kernel.object_at(CURRENT_PID, copied).unwrap(), event));
}
