use std::sync::mpsc::Sender;

use crate::{
    animation::binding::BindingDef,
    foundation::ids::{HandleMint, RegionHandle, ScopeId},
    region::def::RegionDef,
};

pub(crate) enum Command {
    Register {
        handle: RegionHandle,
        scope: Option<ScopeId>,
        def: RegionDef,
        bindings: Vec<BindingDef>,
    },
    Unregister(RegionHandle),
    RevertScope(ScopeId),
}

/// Sendable handle for changing the region set from other threads.
///
/// Commands are applied at the start of the next engine update, in send order. Handles are
/// minted immediately so callers can refer to a region before it is applied; registrations
/// that fail validation are reported through [`crate::Engine::take_rejections`].
#[derive(Clone, Debug)]
pub struct CommandQueue {
    pub(crate) tx: Sender<Command>,
    pub(crate) mint: HandleMint,
}

/// Queued registration that failed when the engine applied it.
#[derive(Debug)]
pub struct Rejection {
    /// Handle minted for the registration.
    pub handle: RegionHandle,
    /// Why the engine refused it.
    pub reason: String,
}

impl CommandQueue {
    /// Queue a region registration.
    pub fn register(&self, def: RegionDef, bindings: Vec<BindingDef>) -> RegionHandle {
        self.send_register(None, def, bindings)
    }

    /// Queue a region registration inside `scope`.
    pub fn register_in(
        &self,
        scope: ScopeId,
        def: RegionDef,
        bindings: Vec<BindingDef>,
    ) -> RegionHandle {
        self.send_register(Some(scope), def, bindings)
    }

    fn send_register(
        &self,
        scope: Option<ScopeId>,
        def: RegionDef,
        bindings: Vec<BindingDef>,
    ) -> RegionHandle {
        let handle = RegionHandle(self.mint.next());
        self.send(Command::Register {
            handle,
            scope,
            def,
            bindings,
        });
        handle
    }

    /// Queue removal of a region.
    pub fn unregister(&self, handle: RegionHandle) {
        self.send(Command::Unregister(handle));
    }

    /// Queue removal of every region in `scope`.
    pub fn revert_scope(&self, scope: ScopeId) {
        self.send(Command::RevertScope(scope));
    }

    fn send(&self, cmd: Command) {
        // The engine is gone; nothing left to apply the command to.
        let _ = self.tx.send(cmd);
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register { handle, def, .. } => f
                .debug_struct("Register")
                .field("handle", handle)
                .field("region", &def.name)
                .finish(),
            Self::Unregister(h) => f.debug_tuple("Unregister").field(h).finish(),
            Self::RevertScope(s) => f.debug_tuple("RevertScope").field(s).finish(),
        }
    }
}
