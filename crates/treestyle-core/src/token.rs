//! Token model: the closed set of syntactic node kinds.
//!
//! Host parsers identify node kinds by a numeric id space of their own, and
//! that space is not guaranteed stable across parser versions. Everything in
//! this engine therefore works on [`TokenKind`], and the [`TokenMap`] trait is
//! the single place where a host version's numeric ids are translated.
//! Unknown external ids map to [`TokenKind::Unknown`] instead of failing, so
//! the engine degrades gracefully against parser drift.

macro_rules! token_kinds {
    ($($name:ident = $id:literal,)+) => {
        /// Kind label of a syntax tree node.
        ///
        /// Covers the Java grammar token set: "physical" tokens that correspond
        /// to literal source text (keywords, operators, punctuation, literals,
        /// identifiers) as well as "virtual" container tokens (expression
        /// lists, modifier lists, parameter lists) that only group children.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        pub enum TokenKind {
            /// External id not known to this engine version.
            Unknown = 0,
            $($name = $id,)+
        }

        impl TokenKind {
            /// Every kind, in id order, `Unknown` first.
            pub const ALL: &'static [TokenKind] = &[TokenKind::Unknown, $(TokenKind::$name,)+];

            /// Maps an external numeric token id to a kind.
            ///
            /// Ids this engine version does not know yield [`TokenKind::Unknown`].
            #[must_use]
            pub fn from_external(id: i32) -> Self {
                match id {
                    $($id => Self::$name,)+
                    _ => Self::Unknown,
                }
            }

            /// The external numeric id of this kind under the default scheme.
            #[must_use]
            pub fn to_external(self) -> i32 {
                self as i32
            }
        }
    };
}

token_kinds! {
    Abstract = 1,
    Annotation = 2,
    AnnotationArrayInit = 3,
    AnnotationDef = 4,
    AnnotationFieldDef = 5,
    AnnotationMemberValuePair = 6,
    Annotations = 7,
    ArrayDeclarator = 8,
    ArrayInit = 9,
    Assign = 10,
    At = 11,
    Band = 12,
    BandAssign = 13,
    Bnot = 14,
    Bor = 15,
    BorAssign = 16,
    Bsr = 17,
    BsrAssign = 18,
    Bxor = 19,
    BxorAssign = 20,
    CaseGroup = 21,
    CharLiteral = 22,
    ClassDef = 23,
    Colon = 24,
    Comma = 25,
    CompactCtorDef = 26,
    CtorCall = 27,
    CtorDef = 28,
    Dec = 29,
    Div = 30,
    DivAssign = 31,
    Dot = 32,
    DoWhile = 33,
    DoubleColon = 34,
    Elist = 35,
    Ellipsis = 36,
    EmptyStat = 37,
    Enum = 38,
    EnumConstantDef = 39,
    EnumDef = 40,
    Eof = 41,
    Equal = 42,
    Expr = 43,
    ExtendsClause = 44,
    Final = 45,
    ForCondition = 46,
    ForEachClause = 47,
    ForInit = 48,
    ForIterator = 49,
    Ge = 50,
    GenericEnd = 51,
    GenericStart = 52,
    Gt = 53,
    Ident = 54,
    ImplementsClause = 55,
    Import = 56,
    Inc = 57,
    IndexOp = 58,
    InstanceInit = 59,
    InterfaceDef = 60,
    LabeledStat = 61,
    Lambda = 62,
    Land = 63,
    Lcurly = 64,
    Le = 65,
    LiteralAssert = 66,
    LiteralBoolean = 67,
    LiteralBreak = 68,
    LiteralByte = 69,
    LiteralCase = 70,
    LiteralCatch = 71,
    LiteralChar = 72,
    LiteralContinue = 73,
    LiteralDefault = 74,
    LiteralDo = 75,
    LiteralDouble = 76,
    LiteralElse = 77,
    LiteralFalse = 78,
    LiteralFinally = 79,
    LiteralFloat = 80,
    LiteralFor = 81,
    LiteralIf = 82,
    LiteralInstanceof = 83,
    LiteralInt = 84,
    LiteralInterface = 85,
    LiteralLong = 86,
    LiteralNative = 87,
    LiteralNew = 88,
    LiteralNonSealed = 89,
    LiteralNull = 90,
    LiteralPermits = 91,
    LiteralPrivate = 92,
    LiteralProtected = 93,
    LiteralPublic = 94,
    LiteralRecord = 95,
    LiteralReturn = 96,
    LiteralSealed = 97,
    LiteralShort = 98,
    LiteralStatic = 99,
    LiteralSuper = 100,
    LiteralSwitch = 101,
    LiteralSynchronized = 102,
    LiteralThis = 103,
    LiteralThrow = 104,
    LiteralThrows = 105,
    LiteralTransient = 106,
    LiteralTrue = 107,
    LiteralTry = 108,
    LiteralVoid = 109,
    LiteralVolatile = 110,
    LiteralWhile = 111,
    LiteralYield = 112,
    Lnot = 113,
    Lor = 114,
    Lparen = 115,
    Lt = 116,
    MethodCall = 117,
    MethodDef = 118,
    MethodRef = 119,
    Minus = 120,
    MinusAssign = 121,
    Mod = 122,
    ModAssign = 123,
    Modifiers = 124,
    NotEqual = 125,
    NumDouble = 126,
    NumFloat = 127,
    NumInt = 128,
    NumLong = 129,
    Objblock = 130,
    PackageDef = 131,
    ParameterDef = 132,
    Parameters = 133,
    PatternVariableDef = 134,
    PermitsClause = 135,
    Plus = 136,
    PlusAssign = 137,
    PostDec = 138,
    PostInc = 139,
    Question = 140,
    Rbrack = 141,
    Rcurly = 142,
    RecordComponentDef = 143,
    RecordComponents = 144,
    RecordDef = 145,
    Resource = 146,
    ResourceSpecification = 147,
    Resources = 148,
    Rparen = 149,
    Semi = 150,
    Sl = 151,
    SlAssign = 152,
    Slist = 153,
    Sr = 154,
    SrAssign = 155,
    Star = 156,
    StarAssign = 157,
    StaticImport = 158,
    StaticInit = 159,
    Strictfp = 160,
    StringLiteral = 161,
    SuperCtorCall = 162,
    SwitchRule = 163,
    TextBlockContent = 164,
    TextBlockLiteralBegin = 165,
    TextBlockLiteralEnd = 166,
    Type = 167,
    TypeArgument = 168,
    TypeArguments = 169,
    TypeExtensionAnd = 170,
    TypeLowerBounds = 171,
    TypeParameter = 172,
    TypeParameters = 173,
    TypeUpperBounds = 174,
    Typecast = 175,
    UnaryMinus = 176,
    UnaryPlus = 177,
    WildcardType = 178,
    VariableDef = 179,
    LiteralClass = 180,
}

impl TokenKind {
    /// The twelve (compound-)assignment operator kinds.
    pub const ASSIGNMENT_OPERATORS: &'static [TokenKind] = &[
        TokenKind::Assign,
        TokenKind::PlusAssign,
        TokenKind::MinusAssign,
        TokenKind::StarAssign,
        TokenKind::DivAssign,
        TokenKind::ModAssign,
        TokenKind::SrAssign,
        TokenKind::BsrAssign,
        TokenKind::SlAssign,
        TokenKind::BandAssign,
        TokenKind::BxorAssign,
        TokenKind::BorAssign,
    ];

    /// Whether this kind is one of the assignment operators.
    #[must_use]
    pub fn is_assignment_operator(self) -> bool {
        Self::ASSIGNMENT_OPERATORS.contains(&self)
    }
}

/// Translation between a host parser version's numeric id space and [`TokenKind`].
///
/// Implement this once per supported host parser version. Version support is
/// an explicit, testable surface; there is no runtime method lookup.
pub trait TokenMap {
    /// Maps an external id to a kind; unknown ids yield [`TokenKind::Unknown`].
    fn to_internal(&self, external: i32) -> TokenKind;

    /// Maps a kind back to this version's external id.
    fn to_external(&self, kind: TokenKind) -> i32;
}

/// The id scheme this engine version was built against.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokens;

impl TokenMap for DefaultTokens {
    fn to_internal(&self, external: i32) -> TokenKind {
        TokenKind::from_external(external)
    }

    fn to_external(&self, kind: TokenKind) -> i32 {
        kind.to_external()
    }
}
