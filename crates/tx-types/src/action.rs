//! Move actions carried by transactions.

use rooch_codec::{decode_variant_index, encode_variant_index, Codec, CodecError, Decoder, Encoder};

use crate::{
    args::MoveArg,
    move_types::{FunctionId, TypeTag},
};

/// Executes a compiled script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCall {
    pub code: Vec<u8>,
    pub ty_args: Vec<TypeTag>,
    pub args: Vec<Vec<u8>>,
}

rooch_codec::impl_struct_codec!(ScriptCall {
    code,
    ty_args,
    args
});

/// Calls an entry function of a published module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub function_id: FunctionId,
    pub ty_args: Vec<TypeTag>,
    /// Codec-encoded arguments, one entry per parameter.
    pub args: Vec<Vec<u8>>,
}

rooch_codec::impl_struct_codec!(FunctionCall {
    function_id,
    ty_args,
    args
});

impl FunctionCall {
    pub fn new(function_id: FunctionId, ty_args: Vec<TypeTag>, args: Vec<MoveArg>) -> Self {
        Self {
            function_id,
            ty_args,
            args: args.into_iter().map(MoveArg::into_bytes).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveAction {
    Script(ScriptCall),
    Function(FunctionCall),
    /// Module publishing through a transaction action is retired. It can
    /// still be encoded but is rejected on decode.
    ModuleBundle(Vec<Vec<u8>>),
}

impl MoveAction {
    pub fn new_function_call(
        function_id: FunctionId,
        ty_args: Vec<TypeTag>,
        args: Vec<MoveArg>,
    ) -> Self {
        Self::Function(FunctionCall::new(function_id, ty_args, args))
    }

    pub fn new_script_call(code: Vec<u8>, ty_args: Vec<TypeTag>, args: Vec<MoveArg>) -> Self {
        Self::Script(ScriptCall {
            code,
            ty_args,
            args: args.into_iter().map(MoveArg::into_bytes).collect(),
        })
    }

    fn variant_index(&self) -> u32 {
        match self {
            Self::Script(_) => 0,
            Self::Function(_) => 1,
            Self::ModuleBundle(_) => 2,
        }
    }
}

impl Codec for MoveAction {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        encode_variant_index(self.variant_index(), enc)?;
        match self {
            Self::Script(call) => call.encode(enc),
            Self::Function(call) => call.encode(enc),
            Self::ModuleBundle(modules) => modules.encode(enc),
        }
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        match decode_variant_index(dec)? {
            0 => Ok(Self::Script(ScriptCall::decode(dec)?)),
            1 => Ok(Self::Function(FunctionCall::decode(dec)?)),
            2 => Err(CodecError::DeprecatedVariant("MoveAction::ModuleBundle")),
            index => Err(CodecError::UnknownVariant {
                ty: "MoveAction",
                index,
            }),
        }
    }
}
