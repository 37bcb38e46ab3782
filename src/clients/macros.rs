/// Generate client methods with oneshot channel boilerplate and automatic tracing.
///
/// Each generated method sends `$request::$variant` with its parameters and a
/// fresh responder, then awaits the actor's reply. A closed mailbox or a
/// dropped responder becomes [`RegistryError::ActorCommunication`](crate::error::RegistryError::ActorCommunication).
macro_rules! client_method {
    ($client:ty => $vis:vis fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            $vis async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::RegistryError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::error::RegistryError::ActorCommunication("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::error::RegistryError::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}
