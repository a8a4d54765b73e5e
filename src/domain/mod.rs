mod hook_name;

pub(crate) use hook_name::HookName;
