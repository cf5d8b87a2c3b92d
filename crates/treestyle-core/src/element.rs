//! Element classifier: maps a physical token node to exactly one
//! lexical-element category.
//!
//! Many tokens are structurally ambiguous: the same colon token means
//! different things in a switch case, a ternary expression and an enhanced
//! `for`; a `{` opens a type body, an anonymous class, an array initializer or
//! a switch block. The classifier resolves these by looking at the node's
//! parent, grandparent, siblings and (for qualifier chains) the closest
//! ancestor outside the chain.
//!
//! Virtual container kinds map to no category (`Ok(None)`). A bare identifier
//! whose role cannot be determined from its structural position alone is
//! classified as [`SourceElement::NameAmbiguous`] rather than guessed.
//! A kind appearing in a parent context the dispatch does not recognize is a
//! [`ConsistencyError`]: it signals a grammar mismatch, not a style finding.

use crate::predicates::ancestor_not;
use crate::token::TokenKind;
use crate::tree::{ConsistencyError, NodeId, SyntaxTree};

/// Lexical-element category of a physical token.
///
/// Variants are named `<token><context>`: `AssignVarDecl` is the `=` of a
/// variable declaration, `AssignAssignment` the `=` of a plain assignment,
/// `ColonCase` the `:` of a switch case, and so on.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceElement {
    // Keywords and modifiers.
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    ClassClassDecl,
    ClassClassLiteral,
    Continue,
    DefaultAnnoElem,
    DefaultMod,
    DefaultSwitch,
    Do,
    Double,
    Ellipsis,
    Else,
    Enum,
    ExtendsType,
    ExtendsTypeBound,
    False,
    Final,
    Finally,
    Float,
    For,
    If,
    Implements,
    Import,
    ImportStaticImport,
    Instanceof,
    Int,
    Interface,
    Long,
    MethRef,
    Native,
    New,
    NewMethRef,
    Null,
    Package,
    Private,
    Protected,
    Public,
    ReturnExpr,
    ReturnNoExpr,
    Short,
    StaticMod,
    StaticStaticImport,
    StaticStaticInit,
    SuperCtorCall,
    SuperExpr,
    SuperTypeBound,
    Switch,
    SynchronizedMod,
    SynchronizedSynchronized,
    ThisCtorCall,
    ThisExpr,
    Throw,
    Throws,
    Transient,
    True,
    Try,
    Void,
    Volatile,
    WhileDo,
    WhileWhile,
    // Literals.
    CharLiteral,
    DoubleLiteral,
    FloatLiteral,
    IntLiteral,
    LongLiteral,
    StringLiteral,
    // Operators.
    AndAssign,
    AndExpr,
    AndTypeBound,
    AssignAssignment,
    AssignVarDecl,
    BitwiseComplement,
    ConditionalAnd,
    ConditionalOr,
    Divide,
    DivideAssign,
    Equal,
    Greater,
    GreaterEqual,
    LeftShift,
    LeftShiftAssign,
    Less,
    LessEqual,
    LogicalComplement,
    MinusAdditive,
    MinusAssign,
    MinusUnary,
    Modulo,
    ModuloAssign,
    Multiply,
    MultiplyAssign,
    NotEqual,
    Or,
    OrAssign,
    PlusAdditive,
    PlusAssign,
    PlusUnary,
    PostDecr,
    PostIncr,
    PreDecr,
    PreIncr,
    QuestionTernary,
    QuestionWildcardType,
    RightShift,
    RightShiftAssign,
    StarTypeImportOnDemand,
    UnsignedRightShift,
    UnsignedRightShiftAssign,
    Xor,
    XorAssign,
    // Names.
    NameAmbiguous,
    NameAnno,
    NameAnnoElemDecl,
    NameAnnoMember,
    NameCtorDecl,
    NameImportComponent,
    NameImportType,
    NameInferredParam,
    NameLocalVarDecl,
    NameMethDecl,
    NamePackageDecl,
    NameParam,
    NameQualifiedType,
    NameSimpleType,
    NameTypeDecl,
    // Punctuation.
    AtAnno,
    AtAnnoDecl,
    ColonCase,
    ColonDefault,
    ColonEnhancedFor,
    ColonLabeledStat,
    ColonTernary,
    Comma,
    DotImport,
    DotPackageDecl,
    DotQualifiedType,
    DotSelector,
    LAngleMethDeclTypeParams,
    LAngleMethInvocationTypeArgs,
    LAngleTypeArgs,
    LAngleTypeParams,
    LBrackArrayDecl,
    LBrackIndex,
    LCurlyAnnoArrayInit,
    LCurlyAnonClass,
    LCurlyArrayInit,
    LCurlyBlock,
    LCurlyCatch,
    LCurlyDo,
    LCurlyEmptyAnnoArrayInit,
    LCurlyEmptyAnonClass,
    LCurlyEmptyArrayInit,
    LCurlyEmptyCatch,
    LCurlyEmptyMethDecl,
    LCurlyEmptyTypeDecl,
    LCurlyEnumConst,
    LCurlyFinally,
    LCurlyFor,
    LCurlyIf,
    LCurlyInstanceInit,
    LCurlyLabeledStat,
    LCurlyMethDecl,
    LCurlyStaticInit,
    LCurlySwitch,
    LCurlySynchronized,
    LCurlyTry,
    LCurlyTypeDecl,
    LCurlyWhile,
    LParenAnno,
    LParenAnnoElemDecl,
    LParenCast,
    LParenCatch,
    LParenDoWhile,
    LParenFor,
    LParenForNoInit,
    LParenIf,
    LParenLambdaParams,
    LParenMethInvocation,
    LParenParams,
    LParenParenthesized,
    LParenResources,
    RAngleMethDeclTypeParams,
    RAngleMethInvocationTypeArgs,
    RAngleTypeArgs,
    RAngleTypeParams,
    RBrackArrayDecl,
    RBrackIndex,
    RCurlyAnnoArrayInit,
    RCurlyAnonClass,
    RCurlyArrayInit,
    RCurlyBlock,
    RCurlyCatch,
    RCurlyDo,
    RCurlyElse,
    RCurlyEmptyAnnoArrayInit,
    RCurlyEmptyAnonClass,
    RCurlyEmptyArrayInit,
    RCurlyEmptyCatch,
    RCurlyEmptyLambda,
    RCurlyEmptyMethDecl,
    RCurlyEmptyTypeDecl,
    RCurlyEnumConstDecl,
    RCurlyFinally,
    RCurlyFor,
    RCurlyIf,
    RCurlyInstanceInit,
    RCurlyLabeledStat,
    RCurlyLambda,
    RCurlyMethDecl,
    RCurlyStaticInit,
    RCurlySwitch,
    RCurlySynchronized,
    RCurlyTry,
    RCurlyTypeDecl,
    RCurlyWhile,
    RParenAnno,
    RParenAnnoElemDecl,
    RParenCast,
    RParenCatch,
    RParenDoWhile,
    RParenFor,
    RParenForNoUpdate,
    RParenIf,
    RParenMethInvocation,
    RParenParams,
    RParenParenthesized,
    RParenResources,
    SemiAbstractMethDecl,
    SemiAnnoElemDecl,
    SemiEmptyStat,
    SemiEnumDecl,
    SemiFieldDecl,
    SemiForConditionNoUpdate,
    SemiForConditionUpdate,
    SemiForInitCondition,
    SemiForInitNoCondition,
    SemiForNoConditionNoUpdate,
    SemiForNoConditionUpdate,
    SemiForNoInitCondition,
    SemiForNoInitNoCondition,
    SemiImport,
    SemiPackageDecl,
    SemiResources,
    SemiStatement,
    SemiStaticImport,
    SemiSwitchRule,
    SemiTypeDecl,
}

/// Derives the lexical-element category of `node`.
///
/// Returns `Ok(None)` for virtual container kinds, `Ok(Some(..))` for every
/// physical token in a recognized context, and a [`ConsistencyError`] when the
/// node's context violates the assumed grammar.
///
/// # Errors
///
/// [`ConsistencyError`] when `node`'s kind appears in a parent/grandparent
/// context the dispatch does not recognize.
#[allow(clippy::too_many_lines, clippy::match_same_arms)]
pub fn classify(tree: &SyntaxTree, node: NodeId) -> Result<Option<SourceElement>, ConsistencyError> {
    use SourceElement as E;
    use TokenKind as T;

    let kind = tree.kind(node);
    let parent = tree.parent(node);
    let parent_kind = parent.map_or(T::Unknown, |p| tree.kind(p));
    let grandparent_kind = parent
        .and_then(|p| tree.parent(p))
        .map_or(T::Unknown, |g| tree.kind(g));
    let previous_sibling = tree.previous_sibling(node);
    let previous_sibling_kind = previous_sibling.map(|s| tree.kind(s));
    let next_sibling = tree.next_sibling(node);
    let next_sibling_kind = next_sibling.map(|s| tree.kind(s));
    let first_child_kind = tree.first_child(node).map(|c| tree.kind(c));

    let unexpected =
        |detail: &str| Err(ConsistencyError::new(tree, node, detail));

    let element = match kind {
        // Tokens that appear in only one context and map one-to-one.
        T::Abstract => E::Abstract,
        T::ArrayDeclarator => E::LBrackArrayDecl,
        T::Band => E::AndExpr,
        T::BandAssign => E::AndAssign,
        T::Bnot => E::BitwiseComplement,
        T::Bor => E::Or,
        T::BorAssign => E::OrAssign,
        T::Bsr => E::UnsignedRightShift,
        T::BsrAssign => E::UnsignedRightShiftAssign,
        T::Bxor => E::Xor,
        T::BxorAssign => E::XorAssign,
        T::CharLiteral => E::CharLiteral,
        T::Comma => E::Comma,
        T::CtorCall => E::ThisCtorCall,
        T::Dec => E::PreDecr,
        T::Div => E::Divide,
        T::DivAssign => E::DivideAssign,
        T::DoWhile => E::WhileDo,
        T::Ellipsis => E::Ellipsis,
        T::EmptyStat => E::SemiEmptyStat,
        T::Enum => E::Enum,
        T::Equal => E::Equal,
        T::ExtendsClause => E::ExtendsType,
        T::Final => E::Final,
        T::Ge => E::GreaterEqual,
        T::Gt => E::Greater,
        T::ImplementsClause => E::Implements,
        T::Import => E::Import,
        T::Inc => E::PreIncr,
        T::IndexOp => E::LBrackIndex,
        T::LabeledStat => E::ColonLabeledStat,
        T::Lambda => E::LParenLambdaParams,
        T::Land => E::ConditionalAnd,
        T::Le => E::LessEqual,
        T::LiteralAssert => E::Assert,
        T::LiteralBoolean => E::Boolean,
        T::LiteralBreak => E::Break,
        T::LiteralByte => E::Byte,
        T::LiteralCase => E::Case,
        T::LiteralCatch => E::Catch,
        T::LiteralContinue => E::Continue,
        T::LiteralChar => E::Char,
        T::LiteralDo => E::Do,
        T::LiteralDouble => E::Double,
        T::LiteralElse => E::Else,
        T::LiteralFalse => E::False,
        T::LiteralFinally => E::Finally,
        T::LiteralFloat => E::Float,
        T::LiteralFor => E::For,
        T::LiteralIf => E::If,
        T::LiteralInstanceof => E::Instanceof,
        T::LiteralInt => E::Int,
        T::LiteralInterface => E::Interface,
        T::LiteralLong => E::Long,
        T::LiteralNative => E::Native,
        T::LiteralNull => E::Null,
        T::LiteralPrivate => E::Private,
        T::LiteralProtected => E::Protected,
        T::LiteralPublic => E::Public,
        T::LiteralShort => E::Short,
        T::LiteralSuper => E::SuperExpr,
        T::LiteralSwitch => E::Switch,
        T::LiteralThis => E::ThisExpr,
        T::LiteralThrow => E::Throw,
        T::LiteralThrows => E::Throws,
        T::LiteralTransient => E::Transient,
        T::LiteralTrue => E::True,
        T::LiteralTry => E::Try,
        T::LiteralVoid => E::Void,
        T::LiteralVolatile => E::Volatile,
        T::LiteralWhile => E::WhileWhile,
        T::Lnot => E::LogicalComplement,
        T::Lor => E::ConditionalOr,
        T::Lt => E::Less,
        T::MethodCall => E::LParenMethInvocation,
        T::MethodRef => E::MethRef,
        T::Minus => E::MinusAdditive,
        T::MinusAssign => E::MinusAssign,
        T::Mod => E::Modulo,
        T::ModAssign => E::ModuloAssign,
        T::NotEqual => E::NotEqual,
        T::NumDouble => E::DoubleLiteral,
        T::NumFloat => E::FloatLiteral,
        T::NumInt => E::IntLiteral,
        T::NumLong => E::LongLiteral,
        T::PackageDef => E::Package,
        T::Plus => E::PlusAdditive,
        T::PlusAssign => E::PlusAssign,
        T::PostDec => E::PostDecr,
        T::PostInc => E::PostIncr,
        T::Question => E::QuestionTernary,
        T::Sl => E::LeftShift,
        T::SlAssign => E::LeftShiftAssign,
        T::Sr => E::RightShift,
        T::SrAssign => E::RightShiftAssign,
        T::StarAssign => E::MultiplyAssign,
        T::StaticImport => E::ImportStaticImport,
        T::StaticInit => E::StaticStaticInit,
        T::StringLiteral => E::StringLiteral,
        T::SuperCtorCall => E::SuperCtorCall,
        T::TypeExtensionAnd => E::AndTypeBound,
        T::TypeLowerBounds => E::SuperTypeBound,
        T::TypeUpperBounds => E::ExtendsTypeBound,
        T::Typecast => E::LParenCast,
        T::UnaryPlus => E::PlusUnary,
        T::UnaryMinus => E::MinusUnary,
        T::WildcardType => E::QuestionWildcardType,

        // Tokens whose category depends on their context.
        T::ArrayInit => {
            if first_child_kind == Some(T::Rcurly) {
                E::LCurlyEmptyArrayInit
            } else {
                E::LCurlyArrayInit
            }
        }

        T::Assign => {
            if parent_kind == T::VariableDef {
                E::AssignVarDecl
            } else {
                E::AssignAssignment
            }
        }

        T::At => match parent_kind {
            T::Annotation => E::AtAnno,
            T::AnnotationDef => E::AtAnnoDecl,
            _ => return unexpected("'@' outside annotation or annotation declaration"),
        },

        T::Colon => match parent_kind {
            T::LiteralDefault => E::ColonDefault,
            T::LiteralCase => E::ColonCase,
            T::ForEachClause => E::ColonEnhancedFor,
            _ => E::ColonTernary,
        },

        T::Star => {
            if parent_kind == T::Dot {
                E::StarTypeImportOnDemand
            } else {
                E::Multiply
            }
        }

        T::Dot => {
            if ancestor_not(tree, node, &[T::Dot]) == Some(T::PackageDef) {
                E::DotPackageDecl
            } else if ancestor_not(tree, node, &[T::Dot]) == Some(T::Import) {
                E::DotImport
            } else if ancestor_not(tree, node, &[T::ArrayDeclarator, T::Dot]) == Some(T::Type) {
                E::DotQualifiedType
            } else {
                E::DotSelector
            }
        }

        T::GenericEnd => match parent_kind {
            T::TypeParameters => match grandparent_kind {
                T::MethodDef | T::CtorDef => E::RAngleMethDeclTypeParams,
                T::ClassDef | T::InterfaceDef => E::RAngleTypeParams,
                _ => return unexpected("'>' closing type parameters of unexpected declaration"),
            },
            T::TypeArguments => {
                let context = ancestor_not(tree, node, &[T::TypeArguments, T::Dot]);
                if matches!(
                    context,
                    Some(T::Type | T::LiteralNew | T::ExtendsClause | T::ImplementsClause)
                ) {
                    E::RAngleTypeArgs
                } else {
                    E::RAngleMethInvocationTypeArgs
                }
            }
            _ => return unexpected("'>' outside type parameters or type arguments"),
        },

        T::GenericStart => match parent_kind {
            T::TypeParameters => match grandparent_kind {
                T::MethodDef | T::CtorDef => E::LAngleMethDeclTypeParams,
                T::ClassDef | T::InterfaceDef => E::LAngleTypeParams,
                _ => return unexpected("'<' opening type parameters of unexpected declaration"),
            },
            T::TypeArguments => {
                if ancestor_not(tree, node, &[T::TypeArguments, T::Dot]) == Some(T::Type)
                    || matches!(
                        grandparent_kind,
                        T::LiteralNew | T::ExtendsClause | T::ImplementsClause
                    )
                {
                    E::LAngleTypeArgs
                } else {
                    E::LAngleMethInvocationTypeArgs
                }
            }
            _ => return unexpected("'<' outside type parameters or type arguments"),
        },

        T::Ident => match parent_kind {
            T::Annotation => E::NameAnno,
            T::AnnotationFieldDef => E::NameAnnoElemDecl,
            T::VariableDef => E::NameLocalVarDecl,
            T::CtorDef => E::NameCtorDecl,
            T::MethodDef => E::NameMethDecl,
            T::AnnotationMemberValuePair => E::NameAnnoMember,
            T::ParameterDef => {
                // An inferred lambda parameter has an empty TYPE sibling.
                if previous_sibling.map_or(0, |s| tree.child_count(s)) == 0 {
                    E::NameInferredParam
                } else {
                    E::NameParam
                }
            }
            T::ClassDef | T::InterfaceDef | T::AnnotationDef | T::EnumDef => E::NameTypeDecl,
            _ => {
                if ancestor_not(tree, node, &[T::Dot]) == Some(T::PackageDef) {
                    E::NamePackageDecl
                } else if ancestor_not(tree, node, &[T::Dot]) == Some(T::Import) {
                    if next_sibling.is_none() {
                        E::NameImportType
                    } else {
                        E::NameImportComponent
                    }
                } else {
                    let context = ancestor_not(tree, node, &[T::ArrayDeclarator]);
                    if matches!(context, Some(T::Type | T::LiteralNew)) {
                        E::NameSimpleType
                    } else if ancestor_not(tree, node, &[T::ArrayDeclarator, T::Dot])
                        == Some(T::Type)
                    {
                        E::NameQualifiedType
                    } else {
                        E::NameAmbiguous
                    }
                }
            }
        },

        T::Lcurly => match parent_kind {
            T::LiteralSwitch => E::LCurlySwitch,
            T::Objblock => match grandparent_kind {
                T::EnumConstantDef => E::LCurlyEnumConst,
                T::ClassDef | T::InterfaceDef | T::AnnotationDef | T::EnumDef | T::RecordDef => {
                    if next_sibling_kind == Some(T::Rcurly) {
                        E::LCurlyEmptyTypeDecl
                    } else {
                        E::LCurlyTypeDecl
                    }
                }
                T::LiteralNew => {
                    if next_sibling_kind == Some(T::Rcurly) {
                        E::LCurlyEmptyAnonClass
                    } else {
                        E::LCurlyAnonClass
                    }
                }
                _ => return unexpected("'{' opening object block of unexpected declaration"),
            },
            T::ArrayInit => {
                if next_sibling_kind == Some(T::Rcurly) {
                    E::LCurlyEmptyArrayInit
                } else {
                    E::LCurlyArrayInit
                }
            }
            _ => return unexpected("'{' in unexpected context"),
        },

        T::AnnotationArrayInit => {
            if first_child_kind == Some(T::Rcurly) {
                E::LCurlyEmptyAnnoArrayInit
            } else {
                E::LCurlyAnnoArrayInit
            }
        }

        T::LiteralReturn => {
            if first_child_kind == Some(T::Semi) {
                E::ReturnNoExpr
            } else {
                E::ReturnExpr
            }
        }

        T::LiteralClass => {
            if parent_kind == T::ClassDef {
                E::ClassClassDecl
            } else {
                E::ClassClassLiteral
            }
        }

        T::LiteralDefault => match parent_kind {
            T::AnnotationMemberValuePair | T::AnnotationFieldDef => E::DefaultAnnoElem,
            T::Modifiers => E::DefaultMod,
            _ => E::DefaultSwitch,
        },

        T::LiteralNew => {
            if parent_kind == T::MethodRef {
                E::NewMethRef
            } else {
                E::New
            }
        }

        T::LiteralStatic => {
            if parent_kind == T::StaticImport {
                E::StaticStaticImport
            } else {
                E::StaticMod
            }
        }

        T::LiteralSynchronized => {
            if parent_kind == T::Slist {
                E::SynchronizedSynchronized
            } else {
                E::SynchronizedMod
            }
        }

        T::Lparen => match parent_kind {
            T::Annotation => E::LParenAnno,
            T::AnnotationFieldDef => E::LParenAnnoElemDecl,
            T::LiteralDo => E::LParenDoWhile,
            T::LiteralIf => E::LParenIf,
            T::LiteralCatch => E::LParenCatch,
            T::SuperCtorCall | T::LiteralNew => E::LParenMethInvocation,
            T::LiteralFor => match next_sibling {
                Some(s) if tree.first_child(s).is_none() => E::LParenForNoInit,
                Some(_) => E::LParenFor,
                None => return unexpected("'(' of for statement without initializer clause"),
            },
            T::ResourceSpecification => E::LParenResources,
            _ => {
                if next_sibling_kind == Some(T::Parameters) {
                    if parent_kind == T::Lambda {
                        E::LParenLambdaParams
                    } else {
                        E::LParenParams
                    }
                } else {
                    E::LParenParenthesized
                }
            }
        },

        T::Rbrack => match parent_kind {
            T::ArrayDeclarator => E::RBrackArrayDecl,
            T::IndexOp => E::RBrackIndex,
            _ => return unexpected("']' outside array declarator or index operation"),
        },

        T::Rcurly => match parent_kind {
            T::LiteralSwitch => E::RCurlySwitch,
            T::AnnotationArrayInit => {
                if previous_sibling.is_none() {
                    E::RCurlyEmptyAnnoArrayInit
                } else {
                    E::RCurlyAnnoArrayInit
                }
            }
            T::ArrayInit => {
                if previous_sibling.is_none() {
                    E::RCurlyEmptyArrayInit
                } else {
                    E::RCurlyArrayInit
                }
            }
            T::Objblock => match grandparent_kind {
                T::EnumConstantDef => E::RCurlyEnumConstDecl,
                T::ClassDef | T::InterfaceDef | T::AnnotationDef | T::EnumDef | T::RecordDef => {
                    if previous_sibling_kind == Some(T::Lcurly) {
                        E::RCurlyEmptyTypeDecl
                    } else {
                        E::RCurlyTypeDecl
                    }
                }
                T::LiteralNew => {
                    if previous_sibling_kind == Some(T::Lcurly) {
                        E::RCurlyEmptyAnonClass
                    } else {
                        E::RCurlyAnonClass
                    }
                }
                _ => return unexpected("'}' closing object block of unexpected declaration"),
            },
            T::Slist => match grandparent_kind {
                T::InstanceInit => E::RCurlyInstanceInit,
                T::LabeledStat => E::RCurlyLabeledStat,
                T::LiteralDo => E::RCurlyDo,
                T::LiteralElse | T::LiteralIf => E::RCurlyIf,
                T::LiteralFinally => E::RCurlyFinally,
                T::LiteralFor => E::RCurlyFor,
                T::LiteralSynchronized => E::RCurlySynchronized,
                T::LiteralTry => E::RCurlyTry,
                T::LiteralWhile => E::RCurlyWhile,
                T::Slist => E::RCurlyBlock,
                T::StaticInit => E::RCurlyStaticInit,
                T::SwitchRule => E::RCurlySwitch,
                T::CtorDef | T::MethodDef => {
                    if previous_sibling.is_none() {
                        E::RCurlyEmptyMethDecl
                    } else {
                        E::RCurlyMethDecl
                    }
                }
                T::ArrayInit => {
                    if previous_sibling.is_none() {
                        E::RCurlyEmptyArrayInit
                    } else {
                        E::RCurlyArrayInit
                    }
                }
                T::LiteralCatch => {
                    if previous_sibling.is_none() {
                        E::RCurlyEmptyCatch
                    } else {
                        E::RCurlyCatch
                    }
                }
                T::Lambda => {
                    if previous_sibling.is_none() {
                        E::RCurlyEmptyLambda
                    } else {
                        E::RCurlyLambda
                    }
                }
                _ => return unexpected("'}' closing statement list of unexpected construct"),
            },
            _ => return unexpected("'}' in unexpected context"),
        },

        T::Rparen => match parent_kind {
            T::Annotation => E::RParenAnno,
            T::AnnotationFieldDef => E::RParenAnnoElemDecl,
            T::LiteralCatch => E::RParenCatch,
            T::LiteralDo => E::RParenDoWhile,
            T::LiteralIf => E::RParenIf,
            T::CtorDef | T::MethodDef | T::Lambda => E::RParenParams,
            T::SuperCtorCall | T::LiteralNew | T::MethodCall => E::RParenMethInvocation,
            T::LiteralFor => match previous_sibling {
                Some(s) if tree.first_child(s).is_none() => E::RParenForNoUpdate,
                Some(_) => E::RParenFor,
                None => return unexpected("')' of for statement without update clause"),
            },
            T::ResourceSpecification => E::RParenResources,
            _ => {
                if previous_sibling_kind == Some(T::Type) {
                    E::RParenCast
                } else {
                    E::RParenParenthesized
                }
            }
        },

        T::Semi => match parent_kind {
            T::PackageDef => E::SemiPackageDecl,
            T::Import => E::SemiImport,
            T::StaticImport => E::SemiStaticImport,
            T::MethodDef => E::SemiAbstractMethDecl,
            T::AnnotationFieldDef => E::SemiAnnoElemDecl,
            T::Objblock => {
                if previous_sibling_kind == Some(T::EnumConstantDef) {
                    E::SemiEnumDecl
                } else {
                    E::SemiTypeDecl
                }
            }
            T::Slist
            | T::SuperCtorCall
            | T::CtorCall
            | T::LiteralDo
            | T::LiteralReturn
            | T::LiteralBreak
            | T::LiteralContinue
            | T::LiteralIf
            | T::LiteralWhile
            | T::LiteralAssert
            | T::LiteralThrow
            | T::LiteralYield => E::SemiStatement,
            T::LiteralFor => {
                let Some(next) = next_sibling else {
                    return Ok(Some(E::SemiStatement));
                };
                let Some(previous) = previous_sibling else {
                    return unexpected("';' of for statement without preceding clause");
                };
                let previous_empty = tree.first_child(previous).is_none();
                let next_empty = tree.first_child(next).is_none();
                match previous_sibling_kind {
                    Some(T::ForInit) => match (previous_empty, next_empty) {
                        (true, true) => E::SemiForNoInitNoCondition,
                        (true, false) => E::SemiForNoInitCondition,
                        (false, true) => E::SemiForInitNoCondition,
                        (false, false) => E::SemiForInitCondition,
                    },
                    Some(T::ForCondition) => match (previous_empty, next_empty) {
                        (true, true) => E::SemiForNoConditionNoUpdate,
                        (true, false) => E::SemiForNoConditionUpdate,
                        (false, true) => E::SemiForConditionNoUpdate,
                        (false, false) => E::SemiForConditionUpdate,
                    },
                    _ => return unexpected("';' of for statement in unexpected position"),
                }
            }
            T::VariableDef => {
                if grandparent_kind == T::Objblock {
                    E::SemiFieldDecl
                } else {
                    return unexpected("';' terminating variable declaration outside a type body");
                }
            }
            T::Resources => E::SemiResources,
            T::SwitchRule => E::SemiSwitchRule,
            _ => return unexpected("';' in unexpected context"),
        },

        // An SLIST is the opening brace of the construct it belongs to; under
        // other parents it is a plain virtual grouping.
        T::Slist => match parent_kind {
            T::StaticInit => E::LCurlyStaticInit,
            T::InstanceInit => E::LCurlyInstanceInit,
            T::LiteralIf => E::LCurlyIf,
            T::LiteralElse => E::RCurlyElse,
            T::LiteralDo => E::LCurlyDo,
            T::LiteralWhile => E::LCurlyWhile,
            T::LiteralFor => E::LCurlyFor,
            T::LiteralTry => E::LCurlyTry,
            T::LiteralFinally => E::LCurlyFinally,
            T::LiteralSynchronized => E::LCurlySynchronized,
            T::LabeledStat => E::LCurlyLabeledStat,
            T::Slist => E::LCurlyBlock,
            T::LiteralCatch => {
                if first_child_kind == Some(T::Rcurly) {
                    E::LCurlyEmptyCatch
                } else {
                    E::LCurlyCatch
                }
            }
            T::CtorDef | T::MethodDef => {
                if first_child_kind == Some(T::Rcurly) {
                    E::LCurlyEmptyMethDecl
                } else {
                    E::LCurlyMethDecl
                }
            }
            _ => return Ok(None),
        },

        // Virtual grouping tokens with no direct source text.
        T::Annotation
        | T::AnnotationDef
        | T::AnnotationFieldDef
        | T::AnnotationMemberValuePair
        | T::Annotations
        | T::CaseGroup
        | T::ClassDef
        | T::CtorDef
        | T::DoubleColon
        | T::Elist
        | T::EnumDef
        | T::EnumConstantDef
        | T::Expr
        | T::ForEachClause
        | T::ForInit
        | T::ForCondition
        | T::ForIterator
        | T::InterfaceDef
        | T::InstanceInit
        | T::MethodDef
        | T::Modifiers
        | T::Objblock
        | T::ParameterDef
        | T::Parameters
        | T::Resource
        | T::ResourceSpecification
        | T::Resources
        | T::Strictfp
        | T::Type
        | T::TypeArgument
        | T::TypeArguments
        | T::TypeParameter
        | T::TypeParameters
        | T::VariableDef => return Ok(None),

        // Kinds the token model accepts but the classifier has no categories
        // for: grammar extensions this engine version does not cover.
        T::CompactCtorDef
        | T::LiteralNonSealed
        | T::LiteralPermits
        | T::LiteralRecord
        | T::LiteralSealed
        | T::LiteralYield
        | T::PatternVariableDef
        | T::PermitsClause
        | T::RecordComponents
        | T::RecordComponentDef
        | T::RecordDef
        | T::SwitchRule
        | T::TextBlockContent
        | T::TextBlockLiteralBegin
        | T::TextBlockLiteralEnd
        | T::Eof
        | T::Unknown => return unexpected("kind has no element category"),
    };

    Ok(Some(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeBuilder;

    // int x = 7; as a local variable declaration inside a block.
    fn local_var_tree() -> (SyntaxTree, NodeId, NodeId, NodeId) {
        let mut b = TreeBuilder::new();
        let slist = b.root(TokenKind::Slist, 1, 0, "{");
        let var = b.child(slist, TokenKind::VariableDef, 2, 4, "");
        let modifiers = b.child(var, TokenKind::Modifiers, 2, 4, "");
        let _ = modifiers;
        let ty = b.child(var, TokenKind::Type, 2, 4, "");
        b.child(ty, TokenKind::LiteralInt, 2, 4, "int");
        let name = b.child(var, TokenKind::Ident, 2, 8, "x");
        let assign = b.child(var, TokenKind::Assign, 2, 10, "=");
        let expr = b.child(assign, TokenKind::Expr, 2, 12, "");
        b.child(expr, TokenKind::NumInt, 2, 12, "7");
        b.child(var, TokenKind::Semi, 2, 13, ";");
        (b.build(), var, name, assign)
    }

    #[test]
    fn assignment_operator_depends_on_parent() {
        let (tree, _, _, assign) = local_var_tree();
        assert_eq!(
            classify(&tree, assign).unwrap(),
            Some(SourceElement::AssignVarDecl)
        );

        let mut b = TreeBuilder::new();
        let slist = b.root(TokenKind::Slist, 1, 0, "{");
        let expr = b.child(slist, TokenKind::Expr, 2, 4, "");
        let assign = b.child(expr, TokenKind::Assign, 2, 6, "=");
        b.child(assign, TokenKind::Ident, 2, 4, "a");
        b.child(assign, TokenKind::Ident, 2, 8, "b");
        let tree = b.build();
        assert_eq!(
            classify(&tree, assign).unwrap(),
            Some(SourceElement::AssignAssignment)
        );
    }

    #[test]
    fn declaration_name() {
        let (tree, _, name, _) = local_var_tree();
        assert_eq!(
            classify(&tree, name).unwrap(),
            Some(SourceElement::NameLocalVarDecl)
        );
    }

    #[test]
    fn virtual_nodes_have_no_category() {
        let (tree, var, _, _) = local_var_tree();
        assert_eq!(classify(&tree, var).unwrap(), None);
        let root = tree.root().unwrap();
        assert_eq!(classify(&tree, root).unwrap(), None);
    }

    #[test]
    fn colon_contexts() {
        // switch case colon
        let mut b = TreeBuilder::new();
        let group = b.root(TokenKind::CaseGroup, 3, 8, "");
        let case = b.child(group, TokenKind::LiteralCase, 3, 8, "case");
        let expr = b.child(case, TokenKind::Expr, 3, 13, "");
        b.child(expr, TokenKind::NumInt, 3, 13, "1");
        let colon = b.child(case, TokenKind::Colon, 3, 14, ":");
        let tree = b.build();
        assert_eq!(classify(&tree, colon).unwrap(), Some(SourceElement::ColonCase));

        // ternary colon (QUESTION parent)
        let mut b = TreeBuilder::new();
        let question = b.root(TokenKind::Question, 1, 6, "?");
        b.child(question, TokenKind::Ident, 1, 4, "a");
        b.child(question, TokenKind::Ident, 1, 8, "b");
        let colon = b.child(question, TokenKind::Colon, 1, 10, ":");
        b.child(question, TokenKind::Ident, 1, 12, "c");
        let tree = b.build();
        assert_eq!(
            classify(&tree, colon).unwrap(),
            Some(SourceElement::ColonTernary)
        );
    }

    #[test]
    fn dot_walks_past_qualifier_chain() {
        let mut b = TreeBuilder::new();
        let pkg = b.root(TokenKind::PackageDef, 1, 0, "package");
        let outer = b.child(pkg, TokenKind::Dot, 1, 11, ".");
        let inner = b.child(outer, TokenKind::Dot, 1, 9, ".");
        b.child(inner, TokenKind::Ident, 1, 8, "a");
        b.child(inner, TokenKind::Ident, 1, 10, "b");
        b.child(outer, TokenKind::Ident, 1, 12, "c");
        let tree = b.build();
        assert_eq!(
            classify(&tree, inner).unwrap(),
            Some(SourceElement::DotPackageDecl)
        );
        assert_eq!(
            classify(&tree, outer).unwrap(),
            Some(SourceElement::DotPackageDecl)
        );
    }

    #[test]
    fn bare_name_in_expression_is_ambiguous() {
        let mut b = TreeBuilder::new();
        let expr = b.root(TokenKind::Expr, 1, 0, "");
        let plus = b.child(expr, TokenKind::Plus, 1, 2, "+");
        let a = b.child(plus, TokenKind::Ident, 1, 0, "a");
        b.child(plus, TokenKind::Ident, 1, 4, "b");
        let tree = b.build();
        assert_eq!(
            classify(&tree, a).unwrap(),
            Some(SourceElement::NameAmbiguous)
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let (tree, _, name, assign) = local_var_tree();
        assert_eq!(classify(&tree, name).unwrap(), classify(&tree, name).unwrap());
        assert_eq!(
            classify(&tree, assign).unwrap(),
            classify(&tree, assign).unwrap()
        );
    }

    #[test]
    fn unexpected_context_is_consistency_error() {
        // An '@' directly under a statement list violates the grammar.
        let mut b = TreeBuilder::new();
        let slist = b.root(TokenKind::Slist, 1, 0, "{");
        let at = b.child(slist, TokenKind::At, 2, 4, "@");
        let tree = b.build();
        let err = classify(&tree, at).unwrap_err();
        assert_eq!(err.kind, TokenKind::At);
        assert_eq!(err.parent, Some(TokenKind::Slist));
    }

    #[test]
    fn every_physical_token_in_context_classifies() {
        // Totality over a representative well-formed declaration subtree.
        let (tree, _, _, _) = local_var_tree();
        for node in tree.preorder() {
            let result = classify(&tree, node);
            assert!(result.is_ok(), "unexpected failure for {:?}", tree.kind(node));
        }
    }
}
