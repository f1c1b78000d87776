/// Screens the client can show. Navigation is a state change followed by a
/// re-render; there is no URL routing beyond this.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Products,
    ProductNew,
    ProductEdit(String),
}
