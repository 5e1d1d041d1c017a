use std::sync::Arc;

pub trait Listener: Send + Sync {
    fn receive(&self, message: &str);
}

/// Identity comparison on the data pointer only. Comparing `Arc<dyn Listener>`
/// directly would also compare vtable pointers, which are not guaranteed unique.
pub(crate) fn same_listener<A, B>(a: &Arc<A>, b: &Arc<B>) -> bool
where
    A: ?Sized,
    B: ?Sized,
{
    std::ptr::eq(Arc::as_ptr(a).cast::<()>(), Arc::as_ptr(b).cast::<()>())
}
