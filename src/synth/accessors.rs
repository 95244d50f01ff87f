use std::collections::HashSet;

use crate::ast::*;
use crate::Result;

/// One declared field binding, in declaration order.
#[derive(Debug, Clone)]
struct Attribute {
    name: String,
    type_ref: TypeRef,
}

/// Collects a type's declared attributes and existing method names.
///
/// Runs over the type's direct members only: nested type declarations are
/// skipped so every type is synthesized with its own state, and method
/// bodies are skipped because only the declared names matter here.
#[derive(Default)]
struct MemberCollector {
    attributes: Vec<Attribute>,
    method_names: HashSet<String>,
}

impl AstVisitor for MemberCollector {
    fn visit_field_decl(&mut self, field: &FieldDecl) -> Result<()> {
        // Comma-joined bindings are each an independent attribute.
        for binding in &field.variables {
            self.attributes.push(Attribute {
                name: binding.name.clone(),
                type_ref: field.type_ref.clone(),
            });
        }
        Ok(())
    }

    fn visit_method_decl(&mut self, method: &MethodDecl) -> Result<()> {
        self.method_names.insert(method.name.clone());
        Ok(())
    }

    fn visit_constructor_decl(&mut self, _constructor: &ConstructorDecl) -> Result<()> {
        // Constructors never collide with accessor names.
        Ok(())
    }

    fn visit_type_decl(&mut self, _type_decl: &TypeDecl) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn synthesize_type(type_decl: &mut TypeDecl) -> Result<()> {
    match type_decl {
        TypeDecl::Class(c) => synthesize_class(c),
        TypeDecl::Interface(i) => synthesize_interface(i),
    }
}

fn synthesize_class(class: &mut ClassDecl) -> Result<()> {
    // Nested types first, each with fresh state.
    for member in &mut class.body {
        if let ClassMember::TypeDecl(t) = member {
            synthesize_type(t)?;
        }
    }

    // Visit all direct members before acting on the class itself.
    let mut collector = MemberCollector::default();
    walk_class_decl(&mut collector, class)?;
    let MemberCollector { attributes, mut method_names } = collector;
    log::debug!(
        "synthesize class '{}': attributes={} methods={}",
        class.name,
        attributes.len(),
        method_names.len()
    );

    for method in missing_accessors(&attributes, &mut method_names) {
        class.body.push(ClassMember::Method(method));
    }
    Ok(())
}

fn synthesize_interface(interface: &mut InterfaceDecl) -> Result<()> {
    let mut collector = MemberCollector::default();
    walk_interface_decl(&mut collector, interface)?;
    let MemberCollector { attributes, mut method_names } = collector;
    log::debug!(
        "synthesize interface '{}': attributes={} methods={}",
        interface.name,
        attributes.len(),
        method_names.len()
    );

    for method in missing_accessors(&attributes, &mut method_names) {
        interface.body.push(InterfaceMember::Method(method));
    }
    Ok(())
}

/// Builds the getter/setter methods whose names are not yet taken, in field
/// declaration order. Every emitted name is inserted into `method_names`, so
/// two fields whose capitalized names collide yield only the first accessor.
fn missing_accessors(
    attributes: &[Attribute],
    method_names: &mut HashSet<String>,
) -> Vec<MethodDecl> {
    let mut added = Vec::new();
    for attribute in attributes {
        let capitalized = capitalize(&attribute.name);

        let getter_name = format!("get{}", capitalized);
        if method_names.insert(getter_name.clone()) {
            added.push(build_getter(getter_name, attribute));
        }

        let setter_name = format!("set{}", capitalized);
        if method_names.insert(setter_name.clone()) {
            added.push(build_setter(setter_name, attribute));
        }
    }
    added
}

/// `public <T> get<Name>() { return this.<name>; }`
fn build_getter(name: String, attribute: &Attribute) -> MethodDecl {
    let body = Block::new(vec![Stmt::ret(Some(Expr::this_field(&attribute.name)))]);
    MethodDecl::new(name, Some(attribute.type_ref.clone()), Vec::new(), Some(body))
}

/// `public void set<Name>(<T> <name>) { this.<name> = <name>; }`
fn build_setter(name: String, attribute: &Attribute) -> MethodDecl {
    let parameter = Parameter::new(attribute.type_ref.clone(), &attribute.name);
    let assign = Expr::assign(Expr::this_field(&attribute.name), Expr::ident(&attribute.name));
    let body = Block::new(vec![Stmt::expr(assign)]);
    MethodDecl::new(name, None, vec![parameter], Some(body))
}

/// Uppercases the first character, leaving the rest untouched. Names whose
/// first character has no case distinction come back unchanged.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_lowercase_first_char() {
        assert_eq!(capitalize("nombre"), "Nombre");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn capitalize_without_case_distinction() {
        assert_eq!(capitalize("Precio"), "Precio");
        assert_eq!(capitalize("_hidden"), "_hidden");
        assert_eq!(capitalize("9lives"), "9lives");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }
}
