mod file_service_impl;

pub use file_service_impl::FileServiceImpl;
